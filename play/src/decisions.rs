use brain::{Brain, Routine};
use common::halfway_house::PlayerInput;
use std::{fs::File, io, path::Path};

const HEADER: &[&str] = &[
    "time",
    "events",
    "routine",
    "stack_depth",
    "throttle",
    "steer",
    "pitch",
    "yaw",
    "roll",
    "jump",
    "boost",
    "handbrake",
];

/// Writes one CSV row per tick describing what the brain decided.
pub struct Decisions<W: io::Write> {
    w: csv::Writer<W>,
}

impl Decisions<File> {
    pub fn create(path: &Path) -> csv::Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: io::Write> Decisions<W> {
    pub fn new(w: W) -> csv::Result<Self> {
        let mut w = csv::Writer::from_writer(w);
        w.write_record(HEADER)?;
        Ok(Self { w })
    }

    pub fn write(&mut self, time: f32, brain: &Brain, input: &PlayerInput) -> csv::Result<()> {
        let events = brain
            .eeg()
            .events
            .iter()
            .map(|event| format!("{:?}", event))
            .collect::<Vec<_>>()
            .join(";");
        let routine = brain.stack().top().map_or("", Routine::name);

        self.w.write_record(&[
            time.to_string(),
            events,
            routine.to_string(),
            brain.stack().len().to_string(),
            input.Throttle.to_string(),
            input.Steer.to_string(),
            input.Pitch.to_string(),
            input.Yaw.to_string(),
            input.Roll.to_string(),
            input.Jump.to_string(),
            input.Boost.to_string(),
            input.Handbrake.to_string(),
        ])
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.w.flush()
    }
}
