use std::time::Instant;
use wordsquare::{Dictionary, Filler, HeuristicFiller, BUNDLED_WORD_LIST};

fn main() {
    let now = Instant::now();

    let dictionary = Dictionary::load(BUNDLED_WORD_LIST, 5).unwrap();
    println!(
        "Loaded {} words in {}ms",
        dictionary.len(),
        now.elapsed().as_millis()
    );

    let mut filler = HeuristicFiller::new(&dictionary);
    match filler.fill() {
        Some(square) => {
            println!("Filled in {}ms.", now.elapsed().as_millis());
            println!("{}", square);
            assert!(square.is_valid(&dictionary));
        }
        None => println!("No Solution"),
    }
}
