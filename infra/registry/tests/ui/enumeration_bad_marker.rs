use ordum_registry::enumeration;

pub struct Suit;

#[enumeration(crate = "ordum_registry")]
impl Suit {
    #[enumeration(hidden)]
    pub const HEARTS: &'static str = "H";
}

fn main() {
    let _ = Suit;
}
