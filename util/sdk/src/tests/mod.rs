mod config;
mod payment;
mod rpc;
