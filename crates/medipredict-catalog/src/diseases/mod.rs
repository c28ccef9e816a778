pub mod breast_cancer;
pub mod diabetes;
pub mod heart_disease;
