/// Number rendering helpers.
///
/// This module turns values of either numeric domain into text: integers in
/// any radix from 2 to 36, reals in fixed-point notation with a bounded number
/// of fractional digits. Results, symbol dumps and diagnostics all go through
/// these routines so a value prints the same everywhere.
pub mod num;
