#![allow(dead_code)] // each test binary uses a different subset

use devgalaxy::profile::ProfileRecord;
use devgalaxy::transition::{Phase, TransitionObserver, TransitionRequest};
use std::sync::Mutex;

/// Builder for ProfileRecord to keep tests short.
pub struct ProfileBuilder {
    record: ProfileRecord,
}

impl ProfileBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: ProfileRecord::new(id, format!("user-{}", id)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn languages(mut self, langs: &[&str]) -> Self {
        self.record.stack.languages = langs.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn frameworks(mut self, fws: &[&str]) -> Self {
        self.record.stack.frameworks = fws.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn tools(mut self, tools: &[&str]) -> Self {
        self.record.stack.tools = tools.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn databases(mut self, dbs: &[&str]) -> Self {
        self.record.stack.databases = dbs.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.record.color = Some(color.to_string());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.record.size = Some(size);
        self
    }

    pub fn counters(mut self, rings: u32, likes: u64, views: u64) -> Self {
        self.record.ring_count = Some(rings);
        self.record.like_count = Some(likes);
        self.record.view_count = Some(views);
        self
    }

    pub fn build(self) -> ProfileRecord {
        self.record
    }
}

pub fn bare_profiles(n: usize) -> Vec<ProfileRecord> {
    (0..n).map(|i| ProfileBuilder::new(&i.to_string()).build()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Phase(Phase, String),
    Midpoint(String),
}

/// Records every observer call, tagged with the request's destination page.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn midpoints(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Midpoint(_)))
            .count()
    }
}

impl TransitionObserver for RecordingObserver {
    fn on_transition_complete(&self, request: &TransitionRequest) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Midpoint(request.to_page.clone()));
    }

    fn on_phase_change(&self, phase: Phase, request: &TransitionRequest) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Phase(phase, request.to_page.clone()));
    }
}
