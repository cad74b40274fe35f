use boardtherm::math::Rect;
use boardtherm::synthesis::WaveformKind;
use boardtherm::{ComponentSpec, Grid, RunSpec};

pub const DEMO_AMBIENT: f64 = 25.0;
pub const DEMO_SIM_TIME: f64 = 600.0;
pub const DEMO_DT: f64 = 0.25;

/// Four-component reference board: one part per waveform kind, non-overlapping.
pub fn demo_board() -> RunSpec {
    RunSpec {
        grid: Grid {
            nx: 55,
            ny: 42,
            dx: 1.0,
            dy: 1.0,
        },
        ambient: DEMO_AMBIENT,
        sim_time: DEMO_SIM_TIME,
        dt: DEMO_DT,
        components: vec![
            ComponentSpec::new("Q1_SquarePulse", "#4f46e5", WaveformKind::square_pulse())
                .with_footprint(Rect::new(7.0, 40.0, 10.0, 10.0)),
            ComponentSpec::new("D1_Constant", "#16a34a", WaveformKind::constant())
                .with_footprint(Rect::new(30.0, 40.0, 5.0, 5.0)),
            ComponentSpec::new("U1_Sinusoidal", "#f59e0b", WaveformKind::sinusoidal())
                .with_footprint(Rect::new(35.0, 10.0, 8.0, 8.0)),
            ComponentSpec::new("T1_Parabolic", "#ef4444", WaveformKind::parabolic())
                .with_footprint(Rect::new(5.0, 10.0, 6.0, 6.0)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardtherm::math::find_overlaps;

    #[test]
    fn demo_board_is_valid_and_clear() {
        let board = demo_board();
        board.validate().unwrap();
        assert_eq!(board.components.len(), 4);
        let rects: Vec<Rect> = board.components.iter().filter_map(|c| c.footprint).collect();
        assert!(find_overlaps(rects.iter()).is_empty());
    }
}
