use std::collections::VecDeque;

use traffic_watcher::collectors::{CounterReading, CounterSource, TrafficError};

/// Replays a fixed list of readings, then repeats the last one
pub struct ScriptedCounterSource {
    readings: VecDeque<CounterReading>,
    last: CounterReading,
    pub reads: usize,
}

impl ScriptedCounterSource {
    pub fn new(readings: &[(u64, u64)]) -> Self {
        Self {
            readings: readings
                .iter()
                .map(|&(sent, recv)| CounterReading::new(sent, recv))
                .collect(),
            last: CounterReading::default(),
            reads: 0,
        }
    }
}

impl CounterSource for ScriptedCounterSource {
    fn read(&mut self) -> Result<CounterReading, TrafficError> {
        self.reads += 1;
        if let Some(next) = self.readings.pop_front() {
            self.last = next;
        }
        Ok(self.last)
    }
}
