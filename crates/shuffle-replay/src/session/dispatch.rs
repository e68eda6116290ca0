//! Step dispatch: routes each recorded input to the engine and folds the
//! result back into the session.

use std::time::Duration;

use shuffle_common::{DroppableId, InvariantError, Position, ShuffleError};
use shuffle_engine::auto_scroll::{get_droppable_scroll_change, get_window_scroll_change};
use shuffle_engine::placeholder::{add_placeholder, remove_placeholder};
use shuffle_engine::scroll::{scroll_droppable, scroll_viewport};
use shuffle_engine::{
    distribute_jump, get_client_border_box_center, get_client_from_page_border_box_center,
    get_drag_impact, move_cross_axis, move_in_list, DragImpactArgs, JumpScrollPlan,
    KeyboardMoveResult, MoveCrossAxisArgs, MoveInListArgs,
};

use super::core::DragSession;
use crate::scenario::{AutoScrollRequest, KeyAxis, KeyDirection, MovementMode, Step, StepRecord};

impl DragSession {
    /// Apply one step and report the engine's view of the drag afterwards.
    pub fn dispatch(&mut self, index: usize, step: &Step) -> Result<StepRecord, ShuffleError> {
        let mut scroll_jump_plan = None;
        let mut auto_scroll = None;

        match step {
            Step::PointerMove {
                page_center,
                elapsed_ms,
            } => {
                self.mode = MovementMode::Pointer;
                self.pointer_move(*page_center)?;
                auto_scroll = self.auto_scroll(elapsed_ms.map(Duration::from_millis));
            }
            Step::Keyboard { direction, axis } => {
                self.mode = MovementMode::Keyboard;
                let is_moving_forward = *direction == KeyDirection::Forward;
                let moved = match axis {
                    KeyAxis::Main => self.step_in_list(is_moving_forward)?,
                    KeyAxis::Cross => self.step_cross_axis(is_moving_forward)?,
                };
                match moved {
                    Some(result) => scroll_jump_plan = self.apply_keyboard_move(result)?,
                    None => tracing::debug!(?direction, ?axis, "keyboard move had no effect"),
                }
            }
            Step::ScrollWindow { to } => {
                self.viewport = scroll_viewport(&self.viewport, *to);
                self.after_scroll()?;
            }
            Step::ScrollDroppable { id, to } => {
                self.scroll_droppable_to(id, *to)?;
                self.after_scroll()?;
            }
        }

        Ok(StepRecord {
            step: index,
            impact: self.impact.clone(),
            client_center: self.client_selection,
            scroll_jump_plan,
            auto_scroll,
        })
    }

    fn pointer_move(&mut self, page_center: Position) -> Result<(), InvariantError> {
        self.direction = self.direction.update(self.page_center, page_center);
        self.page_center = page_center;
        self.client_selection =
            get_client_from_page_border_box_center(page_center, &self.draggable, &self.viewport);
        self.recompute_impact()
    }

    fn recompute_impact(&mut self) -> Result<(), InvariantError> {
        self.impact = get_drag_impact(DragImpactArgs {
            page_border_box_center: self.page_center,
            draggable: &self.draggable,
            dimensions: &self.dimensions,
            previous_impact: &self.impact,
            viewport: &self.viewport,
            user_direction: self.direction,
            on_lift: &self.on_lift,
        });
        self.sync_placeholder()
    }

    fn step_in_list(
        &self,
        is_moving_forward: bool,
    ) -> Result<Option<KeyboardMoveResult>, InvariantError> {
        move_in_list(MoveInListArgs {
            is_moving_forward,
            draggable: &self.draggable,
            dimensions: &self.dimensions,
            previous_impact: &self.impact,
            previous_page_border_box_center: self.page_center,
            previous_client_selection: self.client_selection,
            viewport: &self.viewport,
            on_lift: &self.on_lift,
        })
    }

    fn step_cross_axis(
        &self,
        is_moving_forward: bool,
    ) -> Result<Option<KeyboardMoveResult>, InvariantError> {
        let Some(over) = self.impact.dragging_over() else {
            return Ok(None);
        };
        move_cross_axis(MoveCrossAxisArgs {
            is_moving_forward,
            previous_page_border_box_center: self.page_center,
            draggable: &self.draggable,
            is_over: self.dimensions.droppable(over)?,
            dimensions: &self.dimensions,
            previous_impact: &self.impact,
            viewport: &self.viewport,
            on_lift: &self.on_lift,
        })
    }

    /// Take a keyboard result. When the new spot is out of view the jump is
    /// spread over the droppable, the window and a manual shift of the item.
    fn apply_keyboard_move(
        &mut self,
        result: KeyboardMoveResult,
    ) -> Result<Option<JumpScrollPlan>, InvariantError> {
        self.impact = result.impact;
        self.client_selection = result.client_selection;
        self.sync_placeholder()?;

        let Some(request) = result.scroll_jump_request else {
            self.page_center = self.page_from_client(self.client_selection);
            return Ok(None);
        };

        let over = match self.impact.dragging_over() {
            Some(id) => Some(self.dimensions.droppable(id)?),
            None => None,
        };
        let plan = distribute_jump(
            request,
            over,
            &self.viewport,
            self.config.session.window_scroll_allowed,
        );

        if let Some(id) = &plan.droppable_id {
            let current = self.droppable_scroll(id)?;
            self.scroll_droppable_to(id, current + plan.droppable_scroll)?;
        }
        if !plan.window_scroll.is_origin() {
            let current = self.viewport.scroll.current;
            self.viewport = scroll_viewport(&self.viewport, current + plan.window_scroll);
        }
        self.client_selection = self.client_selection + plan.manual_move;
        self.page_center = self.page_from_client(self.client_selection);

        Ok(Some(plan))
    }

    /// After a scroll a pointer drag keeps its client position and gets a
    /// new impact; a keyboard drag keeps its impact and is re-rendered.
    fn after_scroll(&mut self) -> Result<(), InvariantError> {
        match self.mode {
            MovementMode::Pointer => {
                self.page_center = self.page_from_client(self.client_selection);
                self.recompute_impact()
            }
            MovementMode::Keyboard => {
                self.client_selection = get_client_border_box_center(
                    &self.impact,
                    &self.draggable,
                    &self.dimensions,
                    &self.viewport,
                    &self.on_lift,
                )?;
                self.page_center = self.page_from_client(self.client_selection);
                Ok(())
            }
        }
    }

    fn droppable_scroll(&self, id: &DroppableId) -> Result<Position, InvariantError> {
        let droppable = self.dimensions.droppable(id)?;
        droppable
            .frame
            .as_ref()
            .map(|frame| frame.scroll.current)
            .ok_or_else(|| InvariantError::MissingScrollFrame(id.clone()))
    }

    fn scroll_droppable_to(
        &mut self,
        id: &DroppableId,
        to: Position,
    ) -> Result<(), InvariantError> {
        let scrolled = scroll_droppable(self.dimensions.droppable(id)?, to)?;
        self.dimensions.insert_droppable(scrolled);
        Ok(())
    }

    /// Keep exactly one foreign droppable grown: the one being dragged over.
    fn sync_placeholder(&mut self) -> Result<(), InvariantError> {
        let over = self
            .impact
            .dragging_over()
            .filter(|id| !self.draggable.is_inside(id))
            .cloned();
        if over == self.placeholder_in {
            return Ok(());
        }

        if let Some(previous) = self.placeholder_in.take() {
            let restored = remove_placeholder(self.dimensions.droppable(&previous)?);
            self.dimensions.insert_droppable(restored);
        }
        if let Some(id) = over {
            let grown = add_placeholder(
                self.dimensions.droppable(&id)?,
                &self.draggable,
                &self.dimensions,
            )?;
            self.dimensions.insert_droppable(grown);
            self.placeholder_in = Some(id);
        }
        Ok(())
    }

    /// Fluid auto-scroll for the current pointer position: the window
    /// first, then the droppable being dragged over.
    fn auto_scroll(&self, elapsed: Option<Duration>) -> Option<AutoScrollRequest> {
        let config = &self.config.auto_scroll;
        let subject = self.draggable.page.margin_box;

        if self.config.session.window_scroll_allowed {
            let change = get_window_scroll_change(
                &self.viewport,
                &subject,
                self.page_center,
                elapsed,
                config,
            );
            if let Some(change) = change {
                return Some(AutoScrollRequest::Window { change });
            }
        }

        let droppable = self.dimensions.droppable(self.impact.dragging_over()?).ok()?;
        let change =
            get_droppable_scroll_change(droppable, &subject, self.page_center, elapsed, config)?;
        Some(AutoScrollRequest::Droppable {
            id: droppable.id().clone(),
            change,
        })
    }
}
