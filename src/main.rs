use log::info;

use matrix_ttt::{Match, Player, Symbol};

fn main() {
    env_logger::init();

    // a match between two human players
    let mut first_match = Match::new(
        Player::Human {
            symbol: Symbol::Zero,
        },
        Player::Human { symbol: Symbol::One },
    );
    let winner = first_match.play().expect("Failed to finish the match");
    info!("first match won by {}", winner);

    // a match between a machine and a human player
    let mut second_match = Match::new(
        Player::Computer {
            symbol: Symbol::Zero,
        },
        Player::Human { symbol: Symbol::One },
    );
    let winner = second_match.play().expect("Failed to finish the match");
    info!("second match won by {}", winner);
}
