#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Rising,
    Falling,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceChangeRow {
    pub name: String,
    pub direction: PriceDirection,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceReport {
    pub rising: Vec<PriceChangeRow>,
    pub falling: Vec<PriceChangeRow>,
}

impl PriceChangeRow {
    /// `Name (95%)`
    pub fn label(&self) -> String {
        format!("{} ({}%)", self.name, self.percentage)
    }
}
