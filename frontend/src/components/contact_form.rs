use log::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::error::ActionError;
use crate::forms::contact::{ContactForm, ContactPayload, Field, RequestType};
use crate::notify::{Toast, ToastSender};
use crate::services;
use crate::workflow::{BrowserScheduler, Echo, RunId, Scheduler, Stage, Transition, WorkflowRunner};

pub enum Delivery {
    Pending(Transition),
    Sent,
    Failed(ActionError),
}

/// The contact form together with the workflow that simulates sending it.
/// Fields are cleared only once the send delay has resolved.
pub struct ContactSubmission<S> {
    form: ContactForm,
    runner: WorkflowRunner<Echo<ContactPayload>, S>,
}

impl<S: Scheduler<RunId>> ContactSubmission<S> {
    pub fn new(delay_ms: u32, scheduler: S) -> Self {
        Self {
            form: ContactForm::default(),
            runner: WorkflowRunner::new(
                "contact-submit",
                vec![Stage::new("Sending", delay_ms)],
                Echo::new(),
                scheduler,
            ),
        }
    }

    /// Validates and, when clean, starts sending. Returns whether anything changed.
    pub fn submit(&mut self) -> bool {
        if self.runner.is_busy() {
            return false;
        }
        match self.form.submit() {
            Ok(payload) => self.runner.start(payload),
            Err(err) => {
                debug!("contact form rejected: {}", err);
                true
            }
        }
    }

    pub fn on_tick(&mut self, run: RunId) -> Delivery {
        let transition = self.runner.on_tick(run);
        if transition != Transition::Settled {
            return Delivery::Pending(transition);
        }
        let Some(payload) = self.runner.input().cloned() else {
            return Delivery::Pending(transition);
        };
        match services::submit_contact(&payload) {
            Ok(()) => {
                self.form.reset();
                self.runner.reset();
                Delivery::Sent
            }
            Err(err) => Delivery::Failed(err),
        }
    }

    pub fn cancel(&mut self) {
        self.runner.reset();
    }
}

impl<S> ContactSubmission<S> {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.runner.is_busy()
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub toasts: ToastSender,
}

pub enum ContactMsg {
    Edit(Field, String),
    Blur(Field),
    SetRequestType(RequestType),
    Submit,
    Tick(RunId),
}

pub struct ContactFormView {
    submission: ContactSubmission<BrowserScheduler<RunId>>,
}

impl Component for ContactFormView {
    type Message = ContactMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            submission: ContactSubmission::new(
                config::timings().contact_submit_ms,
                BrowserScheduler::new(ctx.link().callback(ContactMsg::Tick)),
            ),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let timings = config::timings();
        match msg {
            ContactMsg::Edit(field, value) => {
                self.submission.form_mut().set(field, value);
                true
            }
            ContactMsg::Blur(field) => {
                self.submission.form_mut().blur(field);
                true
            }
            ContactMsg::SetRequestType(request_type) => {
                self.submission.form_mut().set_request_type(request_type);
                true
            }
            ContactMsg::Submit => self.submission.submit(),
            ContactMsg::Tick(run) => match self.submission.on_tick(run) {
                Delivery::Sent => {
                    ctx.props().toasts.send(Toast::new(
                        "Message sent successfully!",
                        "Our team will respond within 24 hours.",
                        timings.toast_long_ms,
                    ));
                    true
                }
                Delivery::Failed(err) => {
                    ctx.props()
                        .toasts
                        .send(Toast::failure("Error sending message", &err, timings.toast_long_ms));
                    true
                }
                Delivery::Pending(Transition::Ignored) => false,
                Delivery::Pending(_) => true,
            },
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.submission.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let submitting = self.submission.is_submitting();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_message = link.callback(|e: InputEvent| {
            ContactMsg::Edit(Field::Message, e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });

        html! {
            <div class="card contact-form">
                <div class="card-header">
                    <h3>{"✉️ Contact Our Intelligence Team"}</h3>
                    <p class="muted">{"Get expert guidance for your $100M+ location strategy"}</p>
                </div>
                <form {onsubmit}>
                    <label>{"What can we help you with?"}</label>
                    <div class="request-types">
                        { for RequestType::ALL.iter().map(|kind| {
                            let kind = *kind;
                            let active = self.submission.form().data().request_type == kind;
                            html! {
                                <button
                                    type="button"
                                    class={classes!("request-type", active.then_some("active"))}
                                    onclick={link.callback(move |_| ContactMsg::SetRequestType(kind))}
                                >
                                    <span class="icon">{ kind.icon() }</span>
                                    <span>{ kind.label() }</span>
                                </button>
                            }
                        }) }
                    </div>

                    <div class="two-col">
                        { self.text_input(ctx, Field::FullName, "Full Name *", "text", "John Smith") }
                        { self.text_input(ctx, Field::WorkEmail, "Work Email *", "email", "john@company.com") }
                        { self.text_input(ctx, Field::CompanyName, "Company Name", "text", "Fortune 500 Corp") }
                        { self.text_input(ctx, Field::RoleTitle, "Role / Title", "text", "VP Strategy, Site Selection Director") }
                    </div>

                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        rows="4"
                        placeholder="Tell us about your location requirements, investment size, timeline, or specific challenges..."
                        value={self.submission.form().value(Field::Message).to_string()}
                        oninput={on_message}
                    />

                    <button type="submit" class="btn btn-primary btn-block" disabled={!self.submission.form().can_submit(submitting)}>
                        { if submitting { "Sending Message..." } else { "Send Message" } }
                    </button>

                    <div class="trust-row">
                        <span>{"✓ 24-hour response"}</span>
                        <span>{"✓ Enterprise confidentiality"}</span>
                        <span>{"✓ No spam, ever"}</span>
                    </div>
                </form>
            </div>
        }
    }
}

impl ContactFormView {
    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let link = ctx.link();
        let error = self.submission.form().visible_error(field);
        let oninput = link.callback(move |e: InputEvent| {
            ContactMsg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onblur = link.callback(move |_: FocusEvent| ContactMsg::Blur(field));

        html! {
            <div class="field">
                <label>{ label }</label>
                <input
                    type={kind}
                    class={classes!("input", error.is_some().then_some("input-error"))}
                    {placeholder}
                    value={self.submission.form().value(field).to_string()}
                    {oninput}
                    {onblur}
                />
                if let Some(message) = error {
                    <p class="field-error">{ message }</p>
                }
            </div>
        }
    }
}

#[cfg(test)]
impl ContactSubmission<crate::workflow::scheduler::VirtualClock<RunId>> {
    fn advance(&mut self, ms: u64) -> Vec<Delivery> {
        let deadline = self.runner.clock().now_ms() + ms;
        let mut seen = Vec::new();
        while let Some(run) = self.runner.clock_mut().pop_due(deadline) {
            seen.push(self.on_tick(run));
        }
        self.runner.clock_mut().set_now(deadline);
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::scheduler::VirtualClock;

    fn filled() -> ContactSubmission<VirtualClock<RunId>> {
        let mut submission = ContactSubmission::new(2000, VirtualClock::new());
        let form = submission.form_mut();
        form.set_request_type(RequestType::Custom);
        form.set(Field::FullName, "Dana Reyes".to_string());
        form.set(Field::WorkEmail, "dana@corp.com".to_string());
        form.set(Field::CompanyName, "Fortune 500 Corp".to_string());
        form.set(Field::RoleTitle, "VP Strategy".to_string());
        form.set(Field::Message, "Evaluating three Sun Belt metros.".to_string());
        submission
    }

    #[test]
    fn fields_clear_only_after_the_send_delay() {
        let mut submission = filled();
        assert!(submission.submit());
        assert!(submission.is_submitting());

        assert!(submission.advance(1999).is_empty());
        assert!(submission.is_submitting());
        assert_eq!(submission.form().data().full_name, "Dana Reyes");
        assert_eq!(submission.form().data().message, "Evaluating three Sun Belt metros.");

        let deliveries = submission.advance(1);
        assert!(matches!(deliveries.as_slice(), [Delivery::Sent]));
        assert!(!submission.is_submitting());
        let data = submission.form().data();
        for field in [
            &data.full_name,
            &data.work_email,
            &data.company_name,
            &data.role_title,
            &data.message,
        ] {
            assert_eq!(field, "");
        }
        assert_eq!(data.request_type, RequestType::Demo);
    }

    #[test]
    fn invalid_form_never_starts_sending() {
        let mut submission = filled();
        submission.form_mut().set(Field::WorkEmail, "not-an-email".to_string());
        assert!(submission.submit());
        assert!(!submission.is_submitting());
        assert!(submission.advance(5000).is_empty());
        assert_eq!(submission.form().data().full_name, "Dana Reyes");
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut submission = filled();
        assert!(submission.submit());
        assert!(!submission.submit());
        assert_eq!(submission.advance(2000).len(), 1);
    }

    #[test]
    fn cancel_drops_the_pending_send() {
        let mut submission = filled();
        submission.submit();
        submission.advance(1000);
        submission.cancel();
        assert!(submission.advance(5000).is_empty());
        assert_eq!(submission.form().data().full_name, "Dana Reyes");
    }
}
