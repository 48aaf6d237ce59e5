use polars::prelude::*;

/// Builds the narrowing expression for one user selection. Join keys are
/// explicit so no caller depends on column positions or UI widget state.
#[derive(Clone)]
pub struct SelectionFilter {
    filter_expr: Option<Expr>,
}

impl SelectionFilter {
    pub fn new() -> Self {
        Self { filter_expr: None }
    }

    // Adds a filter for the game
    pub fn game(mut self, game_id: i64) -> Self {
        let expr = col("gameId").eq(lit(game_id));
        self.extend_filter(expr)
    }

    // Adds a filter for the play within the already-selected game
    pub fn play(mut self, play_id: i64) -> Self {
        let expr = col("playId").eq(lit(play_id));
        self.extend_filter(expr)
    }

    // Adds a filter for a single player's tracking samples
    pub fn player_name(mut self, player_name: &str) -> Self {
        let expr = col("displayName").eq(lit(player_name));
        self.extend_filter(expr)
    }

    // Combines the current filter with a new one using AND logic
    fn extend_filter(&mut self, new_expr: Expr) -> Self {
        self.filter_expr = match self.filter_expr.take() {
            Some(existing_expr) => Some(existing_expr.and(new_expr)),
            None => Some(new_expr),
        };
        self.clone()
    }

    // Builds the final filter expression
    pub fn build(self) -> Expr {
        self.filter_expr.unwrap_or_else(|| lit(true))
    }
}

impl Default for SelectionFilter {
    fn default() -> Self {
        Self::new()
    }
}
