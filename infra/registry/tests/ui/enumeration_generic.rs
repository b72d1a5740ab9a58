use ordum_registry::enumeration;

pub struct Wrapper<T>(T);

#[enumeration(crate = "ordum_registry")]
impl<T> Wrapper<T> {
    pub const ONE: u8 = 1;
}

fn main() {
    let Wrapper(inner) = Wrapper(1_u8);
    assert_eq!(inner, 1);
}
