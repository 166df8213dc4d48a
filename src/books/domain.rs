pub mod model;

// Book is the shared view over every shape a catalog record takes
pub trait Book: Sync + Send {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
}
