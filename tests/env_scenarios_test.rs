//! Step scheduler scenarios: locking, line clears, rewards and game over

use tetris_env::core::{ActivePiece, EnvConfig, GameState, Grid, TetrisEnv};
use tetris_env::types::{Action, PieceKind, GRID_HEIGHT, GRID_WIDTH};

fn env_with(grid: Grid, piece: ActivePiece) -> TetrisEnv {
    let state = GameState::new(grid, piece);
    TetrisEnv::with_state(EnvConfig::seeded(2024), state).expect("valid state")
}

fn fill_row_except(grid: &mut Grid, row: usize, skip: &[usize]) {
    for col in (0..GRID_WIDTH).filter(|c| !skip.contains(c)) {
        grid.set(row, col, 6).unwrap();
    }
}

/// Grid whose spawn area is blocked for every kind: row 0, columns 3..=6.
fn blocked_spawn_grid() -> Grid {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    for col in 3..=6 {
        grid.set(0, col, 5).unwrap();
    }
    grid
}

#[test]
fn reset_starts_clean() {
    let mut env = TetrisEnv::new(EnvConfig::seeded(11)).unwrap();
    for _ in 0..5 {
        let overlay = env.reset();
        let game = env.game();
        assert!(game.grid().is_empty());
        assert!(!game.active().collides(game.grid()));
        assert_eq!(game.score(), 0);
        assert!(!game.game_over());
        assert_eq!(overlay, env.overlay());
        assert_eq!(overlay.filled_count(), 4);
    }
}

#[test]
fn scenario_o_piece_drops_to_floor_without_clearing() {
    let mut env = env_with(
        Grid::new(GRID_WIDTH, GRID_HEIGHT),
        ActivePiece::spawn(PieceKind::O, GRID_WIDTH),
    );
    assert_eq!(env.game().active().x, 4);

    for _ in 0..18 {
        let step = env.step(Action::Down);
        assert_eq!(step.reward, 0);
        assert!(!step.done);
    }
    assert_eq!(env.game().active().y, 18);
    assert_eq!(env.game().pieces_locked(), 0);

    let step = env.step(Action::Down);
    assert_eq!(step.reward, 0);
    assert!(!step.done);
    assert_eq!(env.game().pieces_locked(), 1);
    assert_eq!(env.game().score(), 0);

    let grid = env.game().grid();
    assert_eq!(grid.filled_count(), 4);
    for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
        assert_eq!(grid.get(row, col), Ok(2));
    }
    // A fresh piece replaced the locked one.
    assert_eq!(env.game().active().y, 0);
}

#[test]
fn scenario_horizontal_i_completes_bottom_row() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    fill_row_except(&mut grid, 19, &[6, 7, 8, 9]);
    let mut env = env_with(grid, ActivePiece::at(PieceKind::I, 6, 0));

    for _ in 0..19 {
        assert_eq!(env.step(Action::Down).reward, 0);
    }
    assert_eq!(env.game().active().y, 19);

    let step = env.step(Action::Down);
    assert_eq!(step.reward, 10);
    assert!(!step.done);
    assert_eq!(env.game().score(), 100);
    assert_eq!(env.game().lines_cleared(), 1);
    assert!(env.game().grid().is_empty());
}

#[test]
fn scenario_vertical_i_fills_single_gap() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    fill_row_except(&mut grid, 19, &[9]);

    let mut piece = ActivePiece::at(PieceKind::I, 5, 0);
    assert!(piece.rotate(&grid));
    piece.x = 9;
    let mut env = env_with(grid, piece);

    for _ in 0..16 {
        assert_eq!(env.step(Action::Down).reward, 0);
    }
    let step = env.step(Action::Down);
    assert_eq!(step.reward, 10);
    assert_eq!(env.game().score(), 100);

    // The three I cells above the cleared row shifted down by one.
    let grid = env.game().grid();
    assert_eq!(grid.filled_count(), 3);
    for row in 17..20 {
        assert_eq!(grid.get(row, 9), Ok(1));
    }
}

#[test]
fn sideways_action_locks_and_clears_through_fall_check() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    fill_row_except(&mut grid, 19, &[6, 7, 8, 9]);
    let mut env = env_with(grid, ActivePiece::at(PieceKind::I, 6, 19));

    // Right is blocked by the wall, then the fall check locks the piece.
    let step = env.step(Action::Right);
    assert_eq!(step.reward, 10);
    assert_eq!(env.game().score(), 100);
    assert_eq!(env.game().pieces_locked(), 1);
}

#[test]
fn down_does_not_lock_twice_in_one_tick() {
    let mut env = env_with(
        Grid::new(GRID_WIDTH, GRID_HEIGHT),
        ActivePiece::at(PieceKind::O, 0, 18),
    );
    env.step(Action::Down);
    assert_eq!(env.game().pieces_locked(), 1);
    assert_eq!(env.game().active().y, 0);
}

#[test]
fn scenario_blocked_spawn_ends_game_once() {
    let mut env = env_with(blocked_spawn_grid(), ActivePiece::at(PieceKind::O, 0, 18));

    let step = env.step(Action::Down);
    assert_eq!(step.reward, -100);
    assert!(step.done);
    assert!(env.game().game_over());

    let frozen_state = env.game().clone();
    let frozen_overlay = step.observation.clone();

    for i in 0..20 {
        let action = Action::ALL[i % Action::ALL.len()];
        let step = env.step(action);
        assert!(step.done);
        assert_eq!(step.reward, 0);
        assert_eq!(step.observation, frozen_overlay);
        assert!(step.info.is_empty());
    }
    assert_eq!(env.game(), &frozen_state);
    assert_eq!(env.overlay(), frozen_overlay);
}

#[test]
fn game_over_through_fall_check() {
    let mut env = env_with(blocked_spawn_grid(), ActivePiece::at(PieceKind::O, 0, 18));

    let step = env.step(Action::Left);
    assert_eq!(step.reward, -100);
    assert!(step.done);
}

#[test]
fn reset_clears_game_over() {
    let mut env = env_with(blocked_spawn_grid(), ActivePiece::at(PieceKind::O, 0, 18));
    assert!(env.step(Action::Down).done);

    env.reset();
    assert!(!env.game().game_over());
    assert!(env.game().grid().is_empty());
    assert!(!env.step(Action::Down).done);
}

#[test]
fn seeded_environments_replay_identically() {
    let mut a = TetrisEnv::new(EnvConfig::seeded(31337)).unwrap();
    let mut b = TetrisEnv::new(EnvConfig::seeded(31337)).unwrap();
    for i in 0..400 {
        let action = Action::ALL[(i * 7 + i / 3) % 4];
        assert_eq!(a.step(action), b.step(action));
    }
    assert_eq!(a.game(), b.game());

    a.reset_with_seed(5);
    b.reset_with_seed(5);
    assert_eq!(a.overlay(), b.overlay());
    assert_eq!(a.seed(), 5);
}

#[test]
fn independent_environments_do_not_interfere() {
    let mut a = TetrisEnv::new(EnvConfig::seeded(1)).unwrap();
    let b = TetrisEnv::new(EnvConfig::seeded(1)).unwrap();
    let before = b.game().clone();
    for _ in 0..50 {
        a.step(Action::Down);
    }
    assert_eq!(b.game(), &before);
}

#[test]
fn step_index_boundary() {
    let mut env = TetrisEnv::new(EnvConfig::seeded(8)).unwrap();
    assert_eq!(TetrisEnv::action_space().len(), 4);
    assert!(env.step_index(4).is_err());
    let step = env.step_index(2).unwrap();
    assert!(!step.done);
}

#[test]
fn snapshot_reflects_state() {
    let mut env = TetrisEnv::new(EnvConfig::seeded(4)).unwrap();
    env.step(Action::Down);
    let snap = env.snapshot();
    assert_eq!(snap.board, env.overlay());
    assert_eq!(snap.ticks, 1);
    assert_eq!(snap.seed, 4);
    assert_eq!(snap.active.kind, env.game().active().kind());
    assert!(snap.playable());
}
