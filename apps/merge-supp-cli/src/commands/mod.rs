pub mod merge_supp;
