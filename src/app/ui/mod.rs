mod controls;
mod notice;
