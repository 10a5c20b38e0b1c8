// Services module for business logic
pub mod generator;
pub mod git;
pub mod materializer;
pub mod renderer;
pub mod structure;
pub mod validator;
