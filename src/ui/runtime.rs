use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;
use crate::search::SearchOutcome;

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user activates a result or
	/// cancels.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result: Result<SearchOutcome> = loop {
			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			// Events are handled one at a time on this thread, so every
			// keystroke finishes rewriting the results before the next starts.
			let event = match event_rx.recv() {
				Ok(event) => event,
				Err(mpsc::RecvError) => {
					break Err(anyhow!("input event channel disconnected"));
				}
			};

			// Most terminals only report presses; a press stands in for the
			// key-up the entries listen for.
			if let Event::Key(key) = event
				&& key.kind == KeyEventKind::Press
				&& let Some(outcome) = self.handle_key(key)
			{
				break Ok(outcome);
			}
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
