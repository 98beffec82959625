pub mod window;

mod tests_window;
