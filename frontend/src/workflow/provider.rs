use std::marker::PhantomData;

use super::machine::Outcome;

/// Produces the settled result of a workflow from the input captured at start.
pub trait ResultProvider {
    type Input;
    type Output;

    fn resolve(&mut self, input: &Self::Input) -> Outcome<Self::Output>;
}

/// Gate for the trigger control: a start with a missing input is a no-op.
pub trait RequiredInput {
    fn is_present(&self) -> bool;
}

impl RequiredInput for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl RequiredInput for () {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T> RequiredInput for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

/// Echoes a static value regardless of input.
pub struct Fixture<I, T> {
    value: T,
    _input: PhantomData<fn(&I)>,
}

impl<I, T> Fixture<I, T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            _input: PhantomData,
        }
    }
}

impl<I, T: Clone> ResultProvider for Fixture<I, T> {
    type Input = I;
    type Output = T;

    fn resolve(&mut self, _input: &I) -> Outcome<T> {
        Outcome::Found(self.value.clone())
    }
}

/// Settles with a copy of the input captured at start.
pub struct Echo<I> {
    _input: PhantomData<fn(&I)>,
}

impl<I> Echo<I> {
    pub fn new() -> Self {
        Self { _input: PhantomData }
    }
}

impl<I> Default for Echo<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Clone> ResultProvider for Echo<I> {
    type Input = I;
    type Output = I;

    fn resolve(&mut self, input: &I) -> Outcome<I> {
        Outcome::Found(input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_missing() {
        assert!(!String::new().is_present());
        assert!(!"   \t".to_string().is_present());
        assert!("Austin".to_string().is_present());
    }

    #[test]
    fn fixture_echoes_value() {
        let mut fixture: Fixture<String, Vec<u8>> = Fixture::new(vec![1, 2]);
        assert_eq!(fixture.resolve(&"anything".to_string()), Outcome::Found(vec![1, 2]));
    }

    #[test]
    fn echo_returns_captured_input() {
        let mut echo = Echo::new();
        assert_eq!(echo.resolve(&"$1200/report".to_string()), Outcome::Found("$1200/report".to_string()));
    }
}
