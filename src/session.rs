use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::document::{DocumentError, load_document};
use crate::model_gateway::{ModelGateway, ModelGatewayRequest};
use crate::path::normalize_path;
use crate::prompt::{build_messages, build_prompt};

const PATH_PROMPT: &str = "Enter path to your text file: ";
const QUESTION_PROMPT: &str = "Enter your question about the document: ";
const NOT_FOUND_MESSAGE: &str = "File not found.";
const ANSWER_HEADER: &str = "=== Answer ===";

pub async fn run_session<R, W, G>(
    input: &mut R,
    output: &mut W,
    gateway: &G,
    system_prompt: &str,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: ModelGateway,
{
    let raw_path = prompt_line(input, output, PATH_PROMPT)?;
    let file_path = normalize_path(&raw_path);
    if file_path != raw_path {
        debug!(raw_path = %raw_path, file_path = %file_path, "normalized drive path");
    }

    let document = match load_document(Path::new(&file_path)) {
        Ok(document) => document,
        Err(DocumentError::NotFound { path }) => {
            info!(path = %path.display(), "document not found");
            writeln!(output, "{NOT_FOUND_MESSAGE}").context("Failed to write stdout")?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let question = prompt_line(input, output, QUESTION_PROMPT)?;
    let prompt = build_prompt(&document, &question);
    info!(
        path = %file_path,
        document_chars = document.chars().count(),
        question_len = question.len(),
        "asking model about document"
    );

    let response = gateway
        .chat(ModelGatewayRequest {
            messages: build_messages(system_prompt, prompt),
        })
        .await?;

    writeln!(output, "\n{ANSWER_HEADER}").context("Failed to write stdout")?;
    writeln!(output, "{}", response.content.trim()).context("Failed to write stdout")?;
    output.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn prompt_line<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}").context("Failed to write stdout")?;
    output.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read stdin")?;
    if read == 0 {
        bail!("stdin closed while waiting for input");
    }
    Ok(line.trim().to_string())
}
