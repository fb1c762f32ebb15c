mod mock_fs;

mod version_tests;
