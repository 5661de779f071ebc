//! Text menus: login, main menu, level select, high scores, controls
//!
//! Screens are a small state machine. Every prompt re-asks until it gets a
//! valid answer; end of input quits.

use std::io::{BufRead, Write};

use crate::accounts::{AccountId, AccountRegistry, format_age};
use crate::error::Result;
use crate::game::LevelOutcome;
use crate::sim::LevelNumber;

/// Menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
    PlayMenu,
    Scores,
    Controls,
    Quit,
}

const CONTROLS: &[&str] = &[
    "Press the UP arrow (or W / space) to jump",
    "Press the LEFT or RIGHT arrow (or A / D) to move",
    "Press Esc or Q to leave a level",
    "Your score is based on how quickly you reach the target",
];

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

pub struct Menu<R, W> {
    input: R,
    out: W,
    top_n: usize,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, top_n: usize) -> Self {
        Self {
            input,
            out,
            top_n: top_n.max(1),
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run screens until the player quits or input ends.
    /// `play` runs one level and reports how it ended.
    pub fn run<F>(&mut self, registry: &mut AccountRegistry, mut play: F) -> Result<()>
    where
        F: FnMut(LevelNumber) -> Result<LevelOutcome>,
    {
        let mut screen = Screen::Login;
        let mut account: Option<AccountId> = None;

        while screen != Screen::Quit {
            screen = match (screen, account) {
                (Screen::Login, _) => match self.login(registry)? {
                    Some(id) => {
                        account = Some(id);
                        Screen::Main
                    }
                    None => Screen::Quit,
                },
                // Every other screen needs someone logged in
                (_, None) => Screen::Login,
                (Screen::Main, Some(id)) => self.main_menu(registry, id)?,
                (Screen::PlayMenu, Some(id)) => self.play_menu(registry, id, &mut play)?,
                (Screen::Scores, Some(id)) => self.scores(registry, id)?,
                (Screen::Controls, Some(_)) => self.controls()?,
                (Screen::Quit, _) => Screen::Quit,
            };
            if screen == Screen::Login {
                account = None;
            }
        }

        writeln!(self.out, "Goodbye!")?;
        Ok(())
    }

    /// Next input line, trimmed. `None` at end of input. Bytes that are not
    /// UTF-8 become U+FFFD and fail validation like any other bad answer.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Ask for a number in `1..=count` until one is given
    fn choose(&mut self, count: usize) -> Result<Option<usize>> {
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(n)),
                _ => writeln!(self.out, "Please enter a number from 1 to {count}.")?,
            }
        }
    }

    fn wait_for_enter(&mut self) -> Result<bool> {
        writeln!(self.out, "Press Enter to go back.")?;
        Ok(self.read_line()?.is_some())
    }

    fn login(&mut self, registry: &mut AccountRegistry) -> Result<Option<AccountId>> {
        writeln!(self.out, "\n== Login ==")?;
        writeln!(self.out, "1. Login")?;
        writeln!(self.out, "2. Exit")?;
        if self.choose(2)? != Some(1) {
            return Ok(None);
        }

        loop {
            write!(self.out, "Enter name: ")?;
            self.out.flush()?;
            let Some(name) = self.read_line()? else {
                return Ok(None);
            };
            if name.is_empty() {
                writeln!(self.out, "Name cannot be blank.")?;
                continue;
            }
            if name.contains(char::REPLACEMENT_CHARACTER) {
                writeln!(self.out, "Name must be plain text.")?;
                continue;
            }
            let id = registry.get_or_create(&name);
            log::info!("Logged in as {name}");
            return Ok(Some(id));
        }
    }

    fn main_menu(&mut self, registry: &AccountRegistry, id: AccountId) -> Result<Screen> {
        let name = registry.account(id).map(|a| a.name()).unwrap_or("");
        writeln!(self.out, "\n== Welcome {name} to My Platformer Game ==")?;
        writeln!(self.out, "1. Play")?;
        writeln!(self.out, "2. High scores")?;
        writeln!(self.out, "3. Controls")?;
        writeln!(self.out, "4. Logout")?;
        Ok(match self.choose(4)? {
            Some(1) => Screen::PlayMenu,
            Some(2) => Screen::Scores,
            Some(3) => Screen::Controls,
            Some(_) => Screen::Login,
            None => Screen::Quit,
        })
    }

    fn best_label(registry: &AccountRegistry, id: AccountId, level: LevelNumber) -> String {
        registry
            .account(id)
            .and_then(|a| a.best_score(level))
            .map(|s| s.value().to_string())
            .unwrap_or_else(|| "Not Set".to_string())
    }

    fn play_menu<F>(
        &mut self,
        registry: &mut AccountRegistry,
        id: AccountId,
        play: &mut F,
    ) -> Result<Screen>
    where
        F: FnMut(LevelNumber) -> Result<LevelOutcome>,
    {
        let levels: Vec<LevelNumber> = LevelNumber::playable().collect();

        writeln!(self.out, "\n== Select a level ==")?;
        for (i, level) in levels.iter().enumerate() {
            writeln!(
                self.out,
                "{}. Level {} (your best: {})",
                i + 1,
                level.index(),
                Self::best_label(registry, id, *level)
            )?;
        }
        writeln!(self.out, "{}. Back", levels.len() + 1)?;

        let choice = match self.choose(levels.len() + 1)? {
            Some(n) if n <= levels.len() => n,
            Some(_) => return Ok(Screen::Main),
            None => return Ok(Screen::Quit),
        };
        let level = levels[choice - 1];

        let outcome = play(level)?;
        match outcome {
            LevelOutcome::Succeeded { score } => {
                if let Some(account) = registry.account_mut(id) {
                    account.add_score(level, score);
                }
                writeln!(self.out, "Level {} complete! Score: {score}", level.index())?;
                Ok(Screen::PlayMenu)
            }
            LevelOutcome::QuitRequested => {
                writeln!(self.out, "Level {} abandoned.", level.index())?;
                Ok(Screen::PlayMenu)
            }
            LevelOutcome::TimedOut => {
                writeln!(self.out, "Out of time on level {}.", level.index())?;
                Ok(Screen::PlayMenu)
            }
            LevelOutcome::WindowClosed => Ok(Screen::Quit),
        }
    }

    fn scores(&mut self, registry: &AccountRegistry, id: AccountId) -> Result<Screen> {
        let now = crate::now_ms();
        writeln!(self.out, "\n== High scores ==")?;
        for level in LevelNumber::playable() {
            writeln!(self.out, "Level {}", level.index())?;
            writeln!(
                self.out,
                "  Your best: {}",
                Self::best_label(registry, id, level)
            )?;
            writeln!(self.out, "  High scores:")?;
            let top = registry.top_scores(level, self.top_n);
            for place in 0..self.top_n {
                match top.get(place) {
                    Some(score) => writeln!(
                        self.out,
                        "    {}: {} ({})",
                        ordinal(place + 1),
                        score.value(),
                        format_age(score.timestamp_ms(), now)
                    )?,
                    None => writeln!(self.out, "    {}: Not Set", ordinal(place + 1))?,
                }
            }
        }
        Ok(if self.wait_for_enter()? {
            Screen::Main
        } else {
            Screen::Quit
        })
    }

    fn controls(&mut self) -> Result<Screen> {
        writeln!(self.out, "\n== Controls ==")?;
        for line in CONTROLS {
            writeln!(self.out, "{line}")?;
        }
        Ok(if self.wait_for_enter()? {
            Screen::Main
        } else {
            Screen::Quit
        })
    }
}
