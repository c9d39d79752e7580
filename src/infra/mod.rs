pub mod cornell;
