pub mod collector;
pub mod console;
pub mod round;
pub mod scorer;
pub mod session;
pub mod story;
pub mod template;
pub mod validator;
