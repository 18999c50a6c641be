//! Shared helpers.

pub mod db_error;
