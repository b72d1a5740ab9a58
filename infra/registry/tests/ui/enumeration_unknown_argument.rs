use ordum_registry::enumeration;

pub struct Suit;

#[enumeration(crate = "ordum_registry", colour = "red")]
impl Suit {
    pub const HEARTS: &'static str = "H";
}

fn main() {
    let _ = Suit;
}
