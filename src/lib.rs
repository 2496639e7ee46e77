//! Convert text files of SAN games, one game per line, into UCI coordinate
//! notation.
//!
//! Each line is tokenized, replayed from the starting position and written
//! as `e2e4 e7e5 ... 1-0`. Lines that cannot be replayed are skipped and
//! reported on the diagnostics stream.

pub mod chess;
