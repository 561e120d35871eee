use crate::utils::shade;

#[test]
fn shade_darkens_each_channel() {
    assert_eq!(shade(0.5, "#804020"), "#402010");
}

#[test]
fn zero_ratio_keeps_the_color() {
    assert_eq!(shade(0.0, "#c5ccd6"), "#c5ccd6");
}

#[test]
fn full_ratio_is_black() {
    assert_eq!(shade(1.0, "#ffffff"), "#000000");
}

#[test]
fn unparseable_colors_pass_through_unchanged() {
    assert_eq!(shade(0.15, "tomato"), "tomato");
    assert_eq!(shade(0.15, "#abc"), "#abc");
    assert_eq!(shade(0.15, "#zzzzzz"), "#zzzzzz");
}
