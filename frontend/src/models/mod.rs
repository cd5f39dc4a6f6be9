pub mod case_study;
pub mod city;
pub mod fpic;
pub mod pricing;
pub mod risk;
pub mod statement;
