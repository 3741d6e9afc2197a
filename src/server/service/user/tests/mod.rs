use starbase_test_utils::prelude::*;
