// libpn532/src/gpio/mock.rs

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::Result;
use crate::gpio::traits::{GpioProvider, InputLine, OutputLine, PinId};
use crate::types::Level;

/// One observable action on the mock pins, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    /// An output was driven (including the initial level at provisioning)
    Set(PinId, Level),
    /// An input was sampled and returned the given level
    Sample(PinId, Level),
}

/// Where an input pin takes its level from.
#[derive(Debug, Clone)]
pub enum InputSource {
    Constant(Level),
    /// Mirror the current level of another (output) pin
    Loopback(PinId),
    /// Successive samples pop from the front; `Low` once exhausted
    Script(VecDeque<Level>),
}

#[derive(Debug, Default)]
struct Bus {
    levels: HashMap<PinId, Level>,
    sources: HashMap<PinId, InputSource>,
    events: Vec<PinEvent>,
}

impl Bus {
    fn sample(&mut self, pin: PinId) -> Level {
        let level = match self.sources.get_mut(&pin) {
            None => Level::Low,
            Some(InputSource::Constant(l)) => *l,
            Some(InputSource::Loopback(src)) => {
                let src = *src;
                self.levels.get(&src).copied().unwrap_or(Level::Low)
            }
            Some(InputSource::Script(q)) => q.pop_front().unwrap_or(Level::Low),
        };
        self.events.push(PinEvent::Sample(pin, level));
        level
    }
}

/// Mock GPIO provider for unit tests. Lines share one event log so tests
/// can reconstruct exactly what was clocked on the wire.
#[derive(Debug, Clone, Default)]
pub struct MockGpio {
    bus: Rc<RefCell<Bus>>,
}

impl MockGpio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input_source(&self, pin: PinId, source: InputSource) {
        self.bus.borrow_mut().sources.insert(pin, source);
    }

    /// Feed `bytes` to `pin`, one level per sample, in the given bit order.
    pub fn script_bytes(&self, pin: PinId, bytes: &[u8], order: crate::types::BitOrder) {
        let levels = bytes
            .iter()
            .flat_map(|&b| (0..8).map(move |step| Level::from(order.bit(b, step))))
            .collect();
        self.set_input_source(pin, InputSource::Script(levels));
    }

    pub fn events(&self) -> Vec<PinEvent> {
        self.bus.borrow().events.clone()
    }

    pub fn clear_events(&self) {
        self.bus.borrow_mut().events.clear();
    }

    /// Current level of an output pin, if it was ever driven.
    pub fn level(&self, pin: PinId) -> Option<Level> {
        self.bus.borrow().levels.get(&pin).copied()
    }

    /// Levels of `data` at every clock edge that leaves `idle`.
    pub fn wire_bits(&self, data: PinId, clock: PinId, idle: Level) -> Vec<Level> {
        let mut data_level = Level::Low;
        let mut out = Vec::new();
        for ev in self.bus.borrow().events.iter() {
            match *ev {
                PinEvent::Set(p, l) if p == data => data_level = l,
                PinEvent::Set(p, l) if p == clock && l != idle => out.push(data_level),
                _ => {}
            }
        }
        out
    }

    /// Number of samples taken of `pin` since the log was last cleared.
    pub fn samples(&self, pin: PinId) -> usize {
        self.bus
            .borrow()
            .events
            .iter()
            .filter(|ev| matches!(ev, PinEvent::Sample(p, _) if *p == pin))
            .count()
    }
}

/// Output line handed out by `MockGpio`.
#[derive(Debug)]
pub struct MockOutput {
    pin: PinId,
    bus: Rc<RefCell<Bus>>,
}

/// Input line handed out by `MockGpio`.
#[derive(Debug)]
pub struct MockInput {
    pin: PinId,
    bus: Rc<RefCell<Bus>>,
}

impl OutputLine for MockOutput {
    fn set_level(&mut self, level: Level) {
        let mut bus = self.bus.borrow_mut();
        bus.levels.insert(self.pin, level);
        bus.events.push(PinEvent::Set(self.pin, level));
    }
}

impl InputLine for MockInput {
    fn level(&mut self) -> Level {
        self.bus.borrow_mut().sample(self.pin)
    }
}

impl GpioProvider for MockGpio {
    type Output = MockOutput;
    type Input = MockInput;

    fn output(&mut self, pin: PinId, initial: Level) -> Result<Self::Output> {
        let mut line = MockOutput {
            pin,
            bus: self.bus.clone(),
        };
        line.set_level(initial);
        Ok(line)
    }

    fn input(&mut self, pin: PinId) -> Result<Self::Input> {
        Ok(MockInput {
            pin,
            bus: self.bus.clone(),
        })
    }
}
