// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! labels {
    // LabelSequence shorthand: labels!["RED", "BLUE", "RED"]
    () => {
        $crate::stats::LabelSequence::default()
    };
    ($($label:expr),+ $(,)?) => {
        $crate::stats::LabelSequence::from(vec![$($crate::stats::Label::from($label)),+])
    };
}
