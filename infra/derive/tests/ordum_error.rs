#[test]
fn ordum_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ordum_error_pass.rs");
    t.pass("tests/ui/ordum_error_context.rs");
    t.compile_fail("tests/ui/ordum_error_no_context.rs");
}
