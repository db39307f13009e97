mod activation_handler;
mod focus_handler;
mod membership_handler;
mod reconcile_handler;
mod selection_handler;
