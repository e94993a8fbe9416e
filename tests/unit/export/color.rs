use super::*;

#[test]
fn parses_all_hex_forms() {
    let red = Rgba { r: 255, g: 0, b: 0, a: 255 };
    assert_eq!(parse_hex_color("#f00"), Some(red));
    assert_eq!(parse_hex_color("#ff0000"), Some(red));
    assert_eq!(parse_hex_color("#FFFF0000"), Some(red));
    assert_eq!(
        parse_hex_color("#8f00"),
        Some(Rgba { r: 255, g: 0, b: 0, a: 136 })
    );
    assert_eq!(
        parse_hex_color("#80123456"),
        Some(Rgba { r: 0x12, g: 0x34, b: 0x56, a: 0x80 })
    );
}

#[test]
fn rejects_malformed_input() {
    for s in ["", "#", "ff0000", "#ff00000", "#gg0000", "#ff 000"] {
        assert_eq!(parse_hex_color(s), None, "{s:?}");
    }
}

#[test]
fn css_conversion() {
    assert_eq!(android_to_css_color("#FF0000"), "#ff0000");
    assert_eq!(android_to_css_color("#ff00ff00"), "#00ff00");
    assert_eq!(android_to_css_color("#80ff0000"), "rgba(255,0,0,0.502)");
    assert_eq!(android_to_css_color("#0000"), "rgba(0,0,0,0)");
    assert_eq!(android_to_css_color("red"), "red");
}
