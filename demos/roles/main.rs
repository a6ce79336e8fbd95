//! Contributor-role picker: a multi-select with descriptions, a cap of three
//! and a clear button. Every change is logged to `roles-demo.log`.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, MouseMsg, Msg, Program};
use bubbletea_select::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers, MouseEvent};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;

const HEADER: &str = "Contributor roles  (tab: focus, q: quit)";

struct App {
    // Owns the listener registry the select subscribes to.
    _document: Document,
    roles: Select,
}

fn roles_config() -> SelectConfig {
    SelectConfig::new(vec![
        SelectOption::new("data-curation", "Data curation")
            .with_description("Managing and organizing data."),
        SelectOption::new("funding-acquisition", "Funding acquisition")
            .with_description("Securing financial support."),
        SelectOption::new("formal-analysis", "Formal analysis")
            .with_description("Statistical analysis of data."),
    ])
    .extended(true)
    .multiple(true)
    .max_selections(3)
    .clearable(true)
    .placeholder("Select roles...")
    .width(48)
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let document = Document::new();
        let mut roles = Select::new(roles_config(), |change| log::info!("{change}"));
        roles.mount(&document);
        roles.set_position(2, 2);
        (
            Self {
                _document: document,
                roles,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            match key_msg.key {
                KeyCode::Char('c') if key_msg.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Some(quit());
                }
                KeyCode::Char('q') => return Some(quit()),
                KeyCode::Tab => {
                    if self.roles.focused() {
                        self.roles.blur();
                    } else {
                        return self.roles.focus();
                    }
                    return None;
                }
                _ => {}
            }
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            let event = MouseEvent {
                kind: mouse.button,
                column: mouse.x,
                row: mouse.y,
                modifiers: mouse.modifiers,
            };
            let pointer: Msg = Box::new(PointerMsg::from(event));
            self.roles.update(&pointer);
            return None;
        }

        self.roles.update(&msg);
        None
    }

    fn view(&self) -> String {
        format!("\n  {HEADER}\n{}", indent(&self.roles.view(), 2))
    }
}

fn indent(block: &str, by: usize) -> String {
    let pad = " ".repeat(by);
    block
        .lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("roles-demo.log")?,
    )?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .mouse_motion(bubbletea_rs::MouseMotion::Cell)
        .build()?;
    program.run().await?;
    Ok(())
}
