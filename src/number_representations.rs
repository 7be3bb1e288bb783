pub mod core;

pub mod posit {
    pub mod core;
    pub mod posit16_2;
}
