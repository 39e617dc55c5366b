// Synthetic note payloads for exercising the server.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::modules::notes::core::note::NoteInfo;

const BEER_NAMES: &[&str] = &[
    "Stout",
    "Hop Rod Rye",
    "Old Rasputin",
    "Pliny the Elder",
    "Trappist Westvleteren 12",
    "Brooklyn Black Chocolate Stout",
    "Sierra Nevada Bigfoot",
    "Founders Breakfast Stout",
    "Orval Trappist Ale",
    "Duvel",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Ken", "Radia", "Dennis",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Thompson",
    "Perlman", "Ritchie",
];

pub fn beer_name(rng: &mut impl Rng) -> String {
    pick(rng, BEER_NAMES).to_string()
}

pub fn ipv4_address(rng: &mut impl Rng) -> String {
    let octets: [u8; 4] = [
        rng.gen_range(1..=254),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(1..=254),
    ];
    std::net::Ipv4Addr::from(octets).to_string()
}

pub fn person_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

pub fn fake_note_info(rng: &mut impl Rng) -> NoteInfo {
    NoteInfo {
        title: beer_name(rng),
        context: ipv4_address(rng),
        author: person_name(rng),
        is_public: rng.gen_bool(0.5),
    }
}

fn pick<'a>(rng: &mut impl Rng, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}
