pub mod home;

pub use home::App;
