pub mod a001_employee;
