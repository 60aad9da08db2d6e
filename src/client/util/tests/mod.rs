mod format_time_ago;
mod validate_topic;
