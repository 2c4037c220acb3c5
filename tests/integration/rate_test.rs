//! Rate controller behavior against a real file store.

use pacer::store::DEFAULT_RATE_KEY;
use pacer::{FileStore, KeyValueStore, PlaybackSink, RateController, RatePolicy, SimulatedPlayback};
use tempfile::TempDir;

fn open(dir: &TempDir) -> RateController<FileStore, SimulatedPlayback> {
    let store = FileStore::open(dir.path().join("store.json")).unwrap();
    RateController::load(store, SimulatedPlayback::new(600.0), RatePolicy::default())
}

fn seeded(dir: &TempDir, rate: &str) -> RateController<FileStore, SimulatedPlayback> {
    let mut store = FileStore::open(dir.path().join("store.json")).unwrap();
    store.set(DEFAULT_RATE_KEY, rate).unwrap();
    RateController::load(store, SimulatedPlayback::new(600.0), RatePolicy::default())
}

/// Small deterministic generator so the step sequence is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_bool(&mut self) -> bool {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) & 1 == 1
    }
}

#[test]
fn rate_stays_in_bounds_and_on_grid() {
    let dir = TempDir::new().unwrap();
    let mut controller = open(&dir);
    let mut rng = Lcg(42);

    for _ in 0..2000 {
        if rng.next_bool() {
            controller.speed_up();
        } else {
            controller.slow_down();
        }
        let rate = controller.rate();
        assert!((1.0..=3.0).contains(&rate), "rate {} out of bounds", rate);
        let steps = (rate - 1.0) / 0.05;
        assert!((steps - steps.round()).abs() < 1e-6, "rate {} off grid", rate);
    }
}

#[test]
fn long_climb_never_reaches_max() {
    let dir = TempDir::new().unwrap();
    let mut controller = open(&dir);
    for _ in 0..200 {
        controller.speed_up();
    }
    assert!(controller.rate() < 3.0);
    assert!((controller.rate() - 2.95).abs() < 1e-9);
}

#[test]
fn speed_up_boundary_matches_strict_inequality() {
    let dir = TempDir::new().unwrap();
    assert_eq!(seeded(&dir, "2.96").speed_up(), 2.96);

    let dir = TempDir::new().unwrap();
    assert!((seeded(&dir, "2.94").speed_up() - 2.99).abs() < 1e-9);
}

#[test]
fn slow_down_boundary() {
    let dir = TempDir::new().unwrap();
    assert_eq!(seeded(&dir, "1").slow_down(), 1.0);

    let dir = TempDir::new().unwrap();
    assert!((seeded(&dir, "1.05").slow_down() - 1.0).abs() < 1e-9);
}

#[test]
fn reset_toggle_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut controller = seeded(&dir, "1.8");

    assert_eq!(controller.reset_toggle(), 1.0);
    assert_eq!(controller.reset_toggle(), 1.8);
    assert_eq!(controller.reset_toggle(), 1.0);
    assert_eq!(controller.sink().rate(), 1.0);
}

#[test]
fn step_replaces_saved_rate() {
    let dir = TempDir::new().unwrap();
    let mut controller = seeded(&dir, "1.8");

    controller.reset_toggle();
    controller.speed_up();
    assert_eq!(controller.saved_rate(), None);

    controller.reset_toggle();
    let restored = controller.reset_toggle();
    assert!((restored - 1.05).abs() < 1e-9);
}

#[test]
fn fresh_controller_restores_last_rate() {
    let dir = TempDir::new().unwrap();
    let written = {
        let mut controller = open(&dir);
        controller.speed_up();
        controller.speed_up();
        controller.speed_up()
    };

    let restored = open(&dir);
    assert_eq!(restored.rate(), written);
    assert_eq!(restored.sink().rate(), written);
}

#[test]
fn reset_state_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    {
        let mut controller = seeded(&dir, "2");
        controller.reset_toggle();
    }

    let mut restored = open(&dir);
    assert_eq!(restored.rate(), 1.0);
    assert_eq!(restored.saved_rate(), None);
    // First reset of a new controller saves 1.0 rather than restoring 2.0.
    assert_eq!(restored.reset_toggle(), 1.0);
    assert_eq!(restored.saved_rate(), Some(1.0));
}
