use std::io::{self, BufRead};
use std::sync::mpsc::channel;
use std::thread;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use grandmaster::board_flow::director::GameDirector;
use grandmaster::board_flow::triggers::{handle_square_trigger, TriggerOutcome};
use grandmaster::utils::algebraic::{parse_square, square_name};
use grandmaster::utils::render_board::render_board;

const TICK_INTERVAL: Duration = Duration::from_millis(20);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (command_tx, command_rx) = channel::<String>();

    // Feed stdin lines into the driver loop without blocking it.
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let trimmed = line.trim().to_string();
            if !trimmed.is_empty() && command_tx.send(trimmed).is_err() {
                break;
            }
        }
    });

    let mut director = GameDirector::new_game();
    println!("{}", render_board(director.board()));
    println!("Trigger a square (e2, e4, ...) to select and move.");
    println!("Other commands: board, undo, reset, forfeit, touch <square>, untouch <square>, quit.");

    let mut last_tick = Instant::now();
    let mut was_animating = false;

    loop {
        while let Ok(command) = command_rx.try_recv() {
            match command.as_str() {
                "quit" | "exit" => return,
                "board" => println!("{}", render_board(director.board())),
                "undo" => match director.undo() {
                    Ok(record) => println!(
                        "took back {} -> {}",
                        square_name(record.from),
                        square_name(record.to)
                    ),
                    Err(err) => println!("cannot undo: {err}"),
                },
                "reset" => director.reset(),
                "forfeit" => {
                    let side = director.board().side_to_move();
                    match director.forfeit(side) {
                        Ok(()) => println!("{side:?} forfeits"),
                        Err(err) => println!("cannot forfeit: {err}"),
                    }
                }
                name => {
                    if let Some(rest) = name.strip_prefix("touch ") {
                        match parse_square(rest.trim()) {
                            Some(location) => {
                                if let Err(err) = director.hover(location) {
                                    println!("{err}");
                                }
                            }
                            None => println!("unknown square trigger: {rest}"),
                        }
                    } else if let Some(rest) = name.strip_prefix("untouch ") {
                        match parse_square(rest.trim()) {
                            Some(location) => {
                                if let Err(err) = director.hover_off(location) {
                                    println!("{err}");
                                }
                            }
                            None => println!("unknown square trigger: {rest}"),
                        }
                    } else {
                        match handle_square_trigger(&mut director, name) {
                            Ok(TriggerOutcome::Selected { moves }) => {
                                println!("selected {name}, {moves} possible moves")
                            }
                            Ok(TriggerOutcome::Deselected) => println!("selection cleared"),
                            Ok(TriggerOutcome::Moved(record)) => {
                                println!(
                                    "moved {} -> {}",
                                    square_name(record.from),
                                    square_name(record.to)
                                )
                            }
                            Err(err) => println!("{err}"),
                        }
                    }
                }
            }
        }

        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();
        director.tick(dt);

        // Print the settled board once the pieces stop moving.
        if was_animating && !director.is_animating() {
            println!("{}", render_board(director.board()));
        }
        was_animating = director.is_animating();

        thread::sleep(TICK_INTERVAL);
    }
}
