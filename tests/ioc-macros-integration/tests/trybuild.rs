//! 过程宏编译期测试

#[test]
fn trybuild_ioc_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/component_ok.rs");
    t.pass("tests/trybuild/configuration_ok.rs");
}
