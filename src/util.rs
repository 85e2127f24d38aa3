/// Number formatting helpers.
///
/// This module turns evaluation results into the text shown on the display,
/// written to the history and printed by the command line. Integral values
/// print without a fractional part and non-finite values print as words.
pub mod num;
