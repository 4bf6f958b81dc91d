mod all;
mod footer;
mod header;
mod home;
mod job_form;
mod log;

use super::Frame;
use footer::footer;
use header::header;
use home::home;
use job_form::job_form;
use self::log::log;

pub use all::all as render;
