use std::sync::mpsc::{Receiver, Sender};

use tracing::{error, info};

use crate::engine::error::GenerateError;
use crate::engine::gemini_client::{generate_plan, ClientConfig, GeminiClient};
use crate::engine::protocol::{EngineCommand, EngineResponse};

/// Background worker that owns the generation client. Commands are handled
/// one at a time, so at most one provider request is ever in flight.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    client: Result<GeminiClient, GenerateError>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        config: ClientConfig,
    ) -> Self {
        Self {
            rx,
            tx,
            client: GeminiClient::new(config),
        }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Generate(form) => {
                    info!(
                        grade = form.grade_level,
                        subject = %form.subject,
                        week = form.week,
                        "generating lesson plan"
                    );

                    let result = match &self.client {
                        Ok(client) => generate_plan(client, &form),
                        // Configuration error: report it, attempt nothing.
                        Err(_) => Err(GenerateError::MissingApiKey),
                    };

                    let resp = match result {
                        Ok(plan) => EngineResponse::PlanReady(Box::new(plan)),
                        Err(err) => {
                            error!(cause = %err, "lesson plan generation failed");
                            EngineResponse::GenerateFailed(err.to_string())
                        }
                    };

                    let _ = self.tx.send(resp);
                }
            }
        }
    }
}
