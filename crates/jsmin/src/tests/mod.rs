
mod minify_bad;
