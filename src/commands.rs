//! CLI Command Handlers
//!
//! Each handler takes its CLI args, a client and the Output, returns ExitCode.

use crate::api::TmdbClient;
use crate::cli::{
    validate_tmdb_id, ExitCode, InfoCmd, ListCmd, Output, RecommendCmd, SearchCmd,
};
use crate::models::Category;

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    output.info(format!("Searching for: {}", cmd.query));

    match client.search(&cmd.query).await {
        Ok(mut results) => {
            // Filter by year range
            if let Some(year_from) = cmd.year_from {
                results.retain(|r| r.year().is_some_and(|y| y >= year_from));
            }
            if let Some(year_to) = cmd.year_to {
                results.retain(|r| r.year().is_some_and(|y| y <= year_to));
            }

            results.truncate(cmd.limit);

            if let Err(e) = output.print(&results) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Search failed: {}", e), ExitCode::for_error(&e)),
    }
}

// =============================================================================
// List Command
// =============================================================================

pub async fn list_cmd(cmd: ListCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    let category = Category::from(cmd.category);
    output.info(format!("Fetching {}...", category));

    match client.category(category).await {
        Ok(mut results) => {
            results.truncate(cmd.limit);

            if let Err(e) = output.print(&results) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(
            format!("Fetching {} failed: {}", category, e),
            ExitCode::for_error(&e),
        ),
    }
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    let id = match validate_tmdb_id(&cmd.id) {
        Ok(id) => id,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };

    output.info(format!("Getting info for: {}", id));

    match client.movie_detail(id).await {
        Ok(detail) => {
            if let Err(e) = output.print(&detail) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Movie info failed: {}", e), ExitCode::for_error(&e)),
    }
}

// =============================================================================
// Recommend Command
// =============================================================================

pub async fn recommend_cmd(cmd: RecommendCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    let id = match validate_tmdb_id(&cmd.id) {
        Ok(id) => id,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };

    output.info(format!("Getting recommendations for: {}", id));

    match client.recommendations(id).await {
        Ok(mut results) => {
            results.truncate(cmd.limit);

            if let Err(e) = output.print(&results) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(
            format!("Recommendations failed: {}", e),
            ExitCode::for_error(&e),
        ),
    }
}
