// Terminal Sokoban on an isometric or hexagonal grid.
// Usage: IsoHexSokoban [interactive|layout] <level file> [config file]
// Set RUST_LOG=debug to see every move the engine accepts or rejects.

use IsoHexSokoban::config::GameConfig;
use IsoHexSokoban::console_interface::{
    cleanup_terminal, handle_input, render_game, render_level_to_string, setup_terminal,
    ConsoleInput, KeyBindings,
};
use IsoHexSokoban::core::{CoordinateSystem, Game, LevelGrid, MoveOutcome, Topology};
use IsoHexSokoban::layout_export::get_layout_json;
use IsoHexSokoban::models::GameRenderState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let switch = args.next().unwrap_or("interactive".to_string());
    let level_path = args
        .next()
        .ok_or("usage: IsoHexSokoban [interactive|layout] <level file> [config file]")?;
    let config = match args.next() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let text = std::fs::read_to_string(&level_path)?;
    let level = LevelGrid::load(&text, &config.tile_codes)?;

    match config.topology {
        Topology::Isometric => {
            let layout = config.isometric_layout(&level);
            run(&switch, Game::new(level, layout))
        }
        Topology::Hexagonal => {
            let layout = config.hexagonal_layout(&level);
            run(&switch, Game::new(level, layout))
        }
    }
}

fn run<C>(switch: &str, game: Game<C>) -> Result<(), Box<dyn std::error::Error>>
where
    C: CoordinateSystem,
    C::Direction: KeyBindings,
{
    match switch {
        "layout" => {
            println!("{}", get_layout_json(&game)?);
            Ok(())
        }
        "interactive" => run_interactive(game),
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'layout'. defaulting to interactive",
                switch
            );
            run_interactive(game)
        }
    }
}

fn run_interactive<C>(mut game: Game<C>) -> Result<(), Box<dyn std::error::Error>>
where
    C: CoordinateSystem,
    C::Direction: KeyBindings,
{
    let topology = game.coordinates().topology();
    let controls = <C::Direction as KeyBindings>::CONTROLS;
    let mut terminal = setup_terminal()?;

    let first_render = GameRenderState {
        board: render_level_to_string(game.level(), topology),
        won: false,
        error: None,
        last_change: None,
        moves_made: 0,
    };
    render_game(&mut terminal, &first_render, controls)?;

    loop {
        match handle_input::<C::Direction>() {
            Ok(ConsoleInput::Quit) => break,
            Ok(ConsoleInput::Move(direction)) => {
                let outcome = game.try_move(direction);
                let to_render = GameRenderState {
                    board: render_level_to_string(game.level(), topology),
                    won: game.is_game_over(),
                    error: match outcome {
                        MoveOutcome::Rejected(reason) => Some(reason.to_string()),
                        _ => None,
                    },
                    last_change: match outcome {
                        MoveOutcome::Moved(change) => Some(change),
                        _ => None,
                    },
                    moves_made: game.moves_made(),
                };
                render_game(&mut terminal, &to_render, controls)?;

                if to_render.won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input::<C::Direction>() {
                            Ok(ConsoleInput::Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                log::error!("error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                log::error!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}
