// CryptoPad
// Terminal front ends for the cryptopad-core transform engine

pub mod tui;
