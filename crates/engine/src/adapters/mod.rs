pub mod scvp;
