/// Read-only lookup of the current quote by instrument name.
///
/// This is the capability a holder of positions needs to value them without
/// owning the instruments themselves.
pub trait PriceSource {
    fn price_of(&self, name: &str) -> Option<f64>;
}

impl<S: PriceSource + ?Sized> PriceSource for &S {
    fn price_of(&self, name: &str) -> Option<f64> {
        (**self).price_of(name)
    }
}

impl PriceSource for std::collections::HashMap<String, f64> {
    fn price_of(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}
