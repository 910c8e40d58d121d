mod allocation;
mod completeness;
mod stack;
mod stress;
