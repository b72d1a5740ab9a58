use ordum_registry::enumeration;

pub struct Suit;

#[enumeration(crate = "ordum_registry")]
impl Default for Suit {
    fn default() -> Self {
        Self
    }
}

fn main() {
    let _ = Suit;
}
