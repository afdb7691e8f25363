use std::time::Instant;

use mazegrid::{Generator, Maze, Solver};

/// Headless profiling run: every generator/solver combination on one maze
/// size, timings logged to logs/profile.log.
///
/// Usage: profile [size] [iterations]
fn main() {
    let file_appender = tracing_appender::rolling::never("logs", "profile.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = args.next().and_then(|s| s.parse::<u8>().ok()).unwrap_or(50);
    let iterations = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    for _ in 0..iterations {
        for generator in Generator::ALL {
            let mut maze = match Maze::new(size, size, (0, 0), None) {
                Ok(maze) => maze,
                Err(err) => {
                    tracing::error!("cannot build a {size}x{size} maze: {err}");
                    return;
                }
            };

            let started = Instant::now();
            maze.generate(generator, false, None);
            tracing::info!("{generator}: generated {size}x{size} in {:?}", started.elapsed());

            for solver in Solver::ALL {
                let started = Instant::now();
                match maze.solve(solver, maze.start(), maze.goal(), || false) {
                    Ok(path) => tracing::info!(
                        "{solver}: path of {} cells in {:?}",
                        path.len(),
                        started.elapsed()
                    ),
                    Err(err) => tracing::error!("{solver}: {err}"),
                }
            }
        }
    }
}
