//! Venues command: list the known venues.

use lt_core::Venue;

/// Prints the fixed set of venues, one per line.
pub fn run() {
    for venue in Venue::ALL {
        println!("{venue}");
    }
}
